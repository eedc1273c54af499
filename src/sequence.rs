/// Symbol used only when querying the scoring provider for a gap-involved
/// pair. Never present in real input.
pub const GAP: char = '-';

/// The single contract the core needs from a surrounding biological-record
/// layer: given anything that wraps a sequence, hand back its residues.
///
/// The identifier/descriptor taxonomy this might plug into (accessions,
/// features, topology, ...) is out of scope here; the core only ever reads
/// the string a caller's record type returns from this one method.
pub trait ResidueSource {
    fn residues(&self) -> &str;
}

impl ResidueSource for str {
    fn residues(&self) -> &str {
        self
    }
}

impl ResidueSource for String {
    fn residues(&self) -> &str {
        self.as_str()
    }
}

impl ResidueSource for &str {
    fn residues(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_is_its_own_residue_source() {
        assert_eq!("ACGT".residues(), "ACGT");
    }

    #[test]
    fn test_string_residue_source() {
        let s = String::from("HEAGAWGHEE");
        assert_eq!(s.residues(), "HEAGAWGHEE");
    }

    struct Record {
        seq: String,
    }

    impl ResidueSource for Record {
        fn residues(&self) -> &str {
            &self.seq
        }
    }

    #[test]
    fn test_custom_record_adapter() {
        let r = Record {
            seq: "ACGT".to_string(),
        };
        assert_eq!(r.residues(), "ACGT");
    }
}
