//! Domain layer constants
//!
//! Fixed thresholds and limits of the analytics heuristics. Infrastructure
//! defaults (file names, env prefixes) live in `tutorlens_infrastructure`.

// ============================================================================
// REPORT SHAPE
// ============================================================================

/// Maximum matched-instance samples kept per marker class
pub const MAX_INSTANCE_SAMPLES: usize = 5;

/// Maximum bullet points in the scorecard summary
pub const MAX_SUMMARY_POINTS: usize = 6;

/// Summary used when a transcript has no learner content at all
pub const NO_DATA_SUMMARY: &str = "No conversation data available for analysis.";

/// Prefix of every non-empty scorecard summary
pub const SUMMARY_HEADING: &str = "Conversation analysis: ";

// ============================================================================
// SCORER CONSTANTS
// ============================================================================

/// Depth score weight per self-correction
pub const DEPTH_SELF_CORRECTION_WEIGHT: f64 = 2.0;

/// Depth score weight per alternative-perspective mention
pub const DEPTH_ALTERNATIVE_WEIGHT: f64 = 2.0;

/// Depth score weight per hesitation
pub const DEPTH_HESITATION_WEIGHT: f64 = 0.5;

/// Vocabulary score weight applied to the infection rate
pub const VOCABULARY_INFECTION_WEIGHT: f64 = 10.0;

/// Vocabulary score bonus when second-half domain usage grew
pub const VOCABULARY_GROWTH_BONUS: f64 = 2.0;

/// Cap on the turn-count contribution to engagement
pub const ENGAGEMENT_TURN_CAP: f64 = 10.0;

/// Cap on the response-length contribution to engagement
pub const ENGAGEMENT_LENGTH_CAP: f64 = 5.0;

/// Characters per engagement length point
pub const ENGAGEMENT_CHARS_PER_POINT: f64 = 10.0;

/// Weight of the sentence ratio in engagement
pub const ENGAGEMENT_SENTENCE_WEIGHT: f64 = 5.0;

/// A turn with more tokens than this counts as a sentence answer
pub const ENGAGEMENT_MIN_WORDS: usize = 3;

/// Learner turns needed for a "deep" sustained dialogue
pub const SUSTAINED_DEEP_TURNS: usize = 5;

/// Learner turns needed for a "moderate" sustained dialogue
pub const SUSTAINED_MODERATE_TURNS: usize = 3;

/// Structure score weight per question/answer exchange
pub const STRUCTURE_QA_WEIGHT: f64 = 1.0;

/// Structure score weight per multi-sentence learner turn
pub const STRUCTURE_MULTI_SENTENCE_WEIGHT: f64 = 0.5;

/// Structure score weight per causal connective
pub const STRUCTURE_CAUSAL_WEIGHT: f64 = 0.3;

/// Evidence score weight per learner experience mention
pub const EVIDENCE_EXPERIENCE_WEIGHT: f64 = 2.0;

/// Evidence score weight per tutor prompt for experience
pub const EVIDENCE_PROMPT_WEIGHT: f64 = 1.5;

/// Evidence score weight per evidentiary keyword
pub const EVIDENCE_KEYWORD_WEIGHT: f64 = 0.5;

/// Multiplier turning average clarity into the clarity score
pub const CLARITY_SCALE: f64 = 5.0;

// ============================================================================
// EMBEDDING & CLUSTERING CONSTANTS
// ============================================================================

/// Dimensionality of the deterministic local embedding
pub const LOCAL_EMBEDDING_DIMENSIONS: usize = 10;

/// Hard cap on clustering rounds
pub const CLUSTERING_MAX_ITERATIONS: usize = 10;

/// Center-to-previous-center similarity above which clustering has converged
pub const CLUSTERING_CONVERGENCE_THRESHOLD: f32 = 0.99;

/// Default number of clusters requested by callers that do not choose one
pub const CLUSTERING_DEFAULT_K: usize = 3;

// ============================================================================
// LEARNING STAGE CONSTANTS
// ============================================================================

/// Highest exchange count still in the self-thinking stage
pub const STAGE_SELF_THINKING_MAX_EXCHANGES: usize = 2;

/// Highest exchange count still in the sharing stage
pub const STAGE_SHARING_MAX_EXCHANGES: usize = 4;
