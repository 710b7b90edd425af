//! Parallel batch parsing
//!
//! Each parse is independent, so a batch is split across the rayon pool.
//! Results keep the order of the inputs.

use rayon::prelude::*;

use crate::error::SipUriResult;
use crate::parser::SipUriParser;
use crate::types::SipUri;

/// Parse every input in parallel, preserving input order
pub fn parse_batch<S>(parser: &SipUriParser, inputs: &[S]) -> Vec<SipUriResult<SipUri>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| parser.parse(input.as_ref()))
        .collect()
}

/// Count the inputs that parse successfully
pub fn count_valid<S>(parser: &SipUriParser, inputs: &[S]) -> usize
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .filter(|input| parser.parse(input.as_ref()).is_ok())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let inputs = [
            "sip:alice@atlanta.com",
            "notasip-missing-colon",
            "sips:bob@biloxi.com",
        ];
        let parser = SipUriParser::new();
        let results = parse_batch(&parser, &inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().user(), Some("alice"));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().port(), Some("5061"));
        assert_eq!(count_valid(&parser, &inputs), 2);
    }

    #[test]
    fn test_batch_accepts_owned_strings() {
        let inputs: Vec<String> = (0..64).map(|i| format!("sip:user{}@host{}.com", i, i)).collect();
        let results = parse_batch(&SipUriParser::new(), &inputs);
        for (i, result) in results.iter().enumerate() {
            let expected = format!("user{}", i);
            assert_eq!(result.as_ref().unwrap().user(), Some(expected.as_str()));
        }
    }
}
