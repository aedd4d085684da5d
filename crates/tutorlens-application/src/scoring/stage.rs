use tutorlens_domain::LearningStage;
use tutorlens_domain::constants::{STAGE_SELF_THINKING_MAX_EXCHANGES, STAGE_SHARING_MAX_EXCHANGES};

/// Lesson stage implied by the number of learner exchanges
pub fn learning_stage(exchanges: usize) -> LearningStage {
    if exchanges <= STAGE_SELF_THINKING_MAX_EXCHANGES {
        LearningStage::SelfThinking
    } else if exchanges <= STAGE_SHARING_MAX_EXCHANGES {
        LearningStage::Sharing
    } else {
        LearningStage::Consolidation
    }
}
