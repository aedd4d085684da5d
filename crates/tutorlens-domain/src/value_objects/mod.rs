//! Value Objects
//!
//! Immutable results and options of the analytics engine. None of them has
//! identity; two values with the same fields are interchangeable.

pub mod class_overview;
pub mod clustering;
pub mod dimension;
pub mod embedding;
pub mod insight;
pub mod options;
pub mod scorecard;
pub mod topic;
pub mod vocabulary;

pub use class_overview::{ClassOverview, DimensionOverview};
pub use clustering::{ClusterAssignment, ClusterMember, ClusteringOptions, TextCluster};
pub use dimension::{Band, Dimension};
pub use embedding::Embedding;
pub use insight::{Attitude, ResponseInsight, SupportAction, UnderstandingLevel, VerbalizationLevel};
pub use options::{AnalysisOptions, InfectionPolicy};
pub use scorecard::{
    AdoptedTerm, ClarityDetails, DepthDetails, DimensionResult, EngagementDetails,
    EvidenceDetails, HesitationInstance, HesitationTally, LearningStage, MarkerInstance,
    MarkerTally, MetacognitionDetails, MetacognitiveMention, QuestionType, QuestionTypeCounts,
    RawCounts, Scorecard, StructureDetails, SummaryPoint, SummaryPointKind, Sustainability,
    TransitionDirection, VocabularyDetails,
};
pub use topic::Topic;
pub use vocabulary::{TermUsage, TransitionReport, VocabularyTransition};
