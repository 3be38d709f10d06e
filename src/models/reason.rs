use serde::Serialize;

/// Why the student is absent, as offered by the form's reason selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reason {
    Sakit,          // Illness
    Kecemasan,      // Emergency
    UrusanKeluarga, // Family matters
    AktivitiLuar,   // School or outside activity
    LainLain,       // Other (free text)
}

impl Reason {
    pub const ALL: [Reason; 5] = [
        Reason::Sakit,
        Reason::Kecemasan,
        Reason::UrusanKeluarga,
        Reason::AktivitiLuar,
        Reason::LainLain,
    ];

    /// Value submitted by the form and shown in the message.
    pub fn code(&self) -> &'static str {
        match self {
            Reason::Sakit => "Sakit",
            Reason::Kecemasan => "Kecemasan",
            Reason::UrusanKeluarga => "Urusan Keluarga",
            Reason::AktivitiLuar => "Aktiviti Luar",
            Reason::LainLain => "Lain-Lain",
        }
    }

    /// Helper: convert input code from CLI (any case, Malay or English alias)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "sakit" | "illness" => Some(Reason::Sakit),
            "kecemasan" | "emergency" => Some(Reason::Kecemasan),
            "urusan keluarga" | "urusan-keluarga" | "family" => Some(Reason::UrusanKeluarga),
            "aktiviti luar" | "aktiviti-luar" | "activity" => Some(Reason::AktivitiLuar),
            "lain-lain" | "lain lain" | "other" => Some(Reason::LainLain),
            _ => None,
        }
    }

    pub fn is_illness(&self) -> bool {
        matches!(self, Reason::Sakit)
    }

    /// True for the variant backed by a free-text override.
    pub fn is_other(&self) -> bool {
        matches!(self, Reason::LainLain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for r in Reason::ALL {
            assert_eq!(Reason::from_code(r.code()), Some(r));
        }
    }

    #[test]
    fn english_aliases_and_case() {
        assert_eq!(Reason::from_code("ILLNESS"), Some(Reason::Sakit));
        assert_eq!(Reason::from_code(" other "), Some(Reason::LainLain));
        assert_eq!(Reason::from_code("holiday"), None);
    }
}
