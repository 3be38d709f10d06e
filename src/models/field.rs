use std::fmt;

/// Form controls, in the order they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Student,
    Reason,
    IllnessType,
    OtherIllness,
    OtherReason,
    CertificateUpload,
    LetterUpload,
    StartDate,
    EndDate,
}

impl Field {
    /// Label shown to the user when the field needs attention.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Student => "Nama Murid",
            Field::Reason => "Sebab Tidak Hadir",
            Field::IllnessType => "Jenis Sakit",
            Field::OtherIllness => "Nyatakan Jenis Sakit",
            Field::OtherReason => "Nyatakan Sebab",
            Field::CertificateUpload => "Sijil Cuti Sakit (MC)",
            Field::LetterUpload => "Surat Ibu Bapa",
            Field::StartDate => "Tarikh Mula",
            Field::EndDate => "Tarikh Tamat",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
