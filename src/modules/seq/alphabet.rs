use serde::{Deserialize, Serialize};

/// Alphabet tag describing how the residues of a sequence are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alphabet {
    Dna,
    Rna,
    Protein,
    /// Any single-letter alphabet
    #[default]
    Generic,
}

/// Characters that may appear in aligned sequences regardless of alphabet
const ALIGNMENT_SYMBOLS: &[u8] = b"-.";

impl Alphabet {
    /// Human readable name of the alphabet
    pub fn name(&self) -> &'static str {
        match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
            Alphabet::Protein => "Protein",
            Alphabet::Generic => "Generic",
        }
    }

    /// The upper-case letters allowed by this alphabet
    pub fn letters(&self) -> &'static [u8] {
        match self {
            Alphabet::Dna => b"ACGTN",
            Alphabet::Rna => b"ACGUN",
            Alphabet::Protein => b"ACDEFGHIKLMNPQRSTVWYBZX*",
            Alphabet::Generic => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ*",
        }
    }

    /// Check an aligned sequence against this alphabet, gaps allowed
    pub fn is_valid_sequence(&self, residues: &[u8]) -> bool {
        let letters = self.letters();

        residues.iter().all(|residue| {
            ALIGNMENT_SYMBOLS.contains(residue) || letters.contains(&residue.to_ascii_uppercase())
        })
    }
}
