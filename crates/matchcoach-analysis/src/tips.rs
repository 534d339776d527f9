//! General coaching tips for a subject

use serde::{Deserialize, Serialize};

/// Generic advice plus subject-specific pointers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingTips {
    pub subject_name: String,
    pub suggestions: Vec<String>,
    pub tips: Vec<String>,
}

/// Build coaching tips for a subject from its catalog entry
pub fn coaching_tips(subject_name: &str, position: &str, difficulty: u8) -> CoachingTips {
    CoachingTips {
        subject_name: subject_name.to_string(),
        suggestions: vec![
            "Focus on farming early and avoid joining fights too soon".to_string(),
            "Use skills deliberately and keep track of cooldowns".to_string(),
            "Watch the minimap and rotate to help teammates".to_string(),
            "Adapt your item build to how the match is going".to_string(),
        ],
        tips: vec![
            format!("{} plays the {} position", subject_name, position),
            format!("Difficulty: {}", difficulty),
            "Practice skill combos until they are second nature".to_string(),
        ],
    }
}
