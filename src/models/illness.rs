use serde::Serialize;

/// Illness subtype, only asked for when the reason is `Sakit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IllnessType {
    Demam,      // Fever
    Flu,        // Flu
    Batuk,      // Cough
    SakitPerut, // Stomachache
    CiritBirit, // Diarrhoea
    LainLain,   // Other (free text)
}

impl IllnessType {
    pub const ALL: [IllnessType; 6] = [
        IllnessType::Demam,
        IllnessType::Flu,
        IllnessType::Batuk,
        IllnessType::SakitPerut,
        IllnessType::CiritBirit,
        IllnessType::LainLain,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            IllnessType::Demam => "Demam",
            IllnessType::Flu => "Flu",
            IllnessType::Batuk => "Batuk",
            IllnessType::SakitPerut => "Sakit Perut",
            IllnessType::CiritBirit => "Cirit-birit",
            // lowercase "l" on purpose: the illness selector differs from the reason selector
            IllnessType::LainLain => "Lain-lain",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "demam" | "fever" => Some(IllnessType::Demam),
            "flu" => Some(IllnessType::Flu),
            "batuk" | "cough" => Some(IllnessType::Batuk),
            "sakit perut" | "sakit-perut" | "stomachache" => Some(IllnessType::SakitPerut),
            "cirit-birit" | "cirit birit" | "diarrhoea" | "diarrhea" => {
                Some(IllnessType::CiritBirit)
            }
            "lain-lain" | "lain lain" | "other" => Some(IllnessType::LainLain),
            _ => None,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, IllnessType::LainLain)
    }
}
