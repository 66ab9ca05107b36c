//! Tests for integer interleaving
//!
//! Fixed cases for ordering, reversibility and the dispatcher, plus the
//! argument checks of the JSON entry points.

use serde_json::json;
use zorder::prelude::*;
use zorder::{args, Morton32, Morton64};

#[cfg(test)]
mod test_typed {
    use super::*;

    #[test]
    fn test_hashing_2d_valid() {
        assert_eq!(interleave(&[100, 50]).unwrap(), interleave2(100, 50));
    }

    #[test]
    fn test_hashing_3d_valid() {
        assert_eq!(interleave(&[10, 50, 40]).unwrap(), interleave3(10, 50, 40));
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(interleave2(100, 30), 5816);
        assert_eq!(interleave3(100, 30, 50), 451824);
        assert_eq!(interleave2(10, 25), 710);
        assert_eq!(interleave3(10, 25, 50), 157226);
    }

    #[test]
    fn test_hash_reversibility_2d_valid() {
        assert_eq!(deinterleave2(interleave(&[100, 30]).unwrap()), (100, 30));
    }

    #[test]
    fn test_hash_reversibility_3d_valid() {
        assert_eq!(deinterleave3(interleave(&[100, 30, 50]).unwrap()), (100, 30, 50));
    }

    #[test]
    fn test_hash_ordinality_2d() {
        assert!(interleave(&[10, 25]).unwrap() < interleave(&[10, 50]).unwrap());
    }

    #[test]
    fn test_hash_ordinality_3d() {
        assert!(interleave(&[10, 25, 50]).unwrap() < interleave(&[10, 25, 100]).unwrap());
    }

    #[test]
    fn test_interleave_input_length_invalid() {
        assert!(matches!(interleave(&[77]), Err(MortonError::InvalidArgument(_))));
    }

    #[test]
    fn test_both_widths_agree_inside_32_bit_budget() {
        assert_eq!(Morton32::interleave2(100, 30) as u64, Morton64::interleave2(100, 30));
        assert_eq!(Morton32::deinterleave3(451824), (100, 30, 50));
    }

    #[test]
    fn test_z_order_of_unit_square() {
        // Z pattern: (0,0) (1,0) (0,1) (1,1)
        let codes: Vec<u64> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .iter()
            .map(|&(x, y)| interleave2(x, y))
            .collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }
}

#[cfg(test)]
mod test_dynamic_args {
    use super::*;

    const W: CodeWidth = CodeWidth::Bits64;

    #[test]
    fn test_interleave2_input_length_invalid() {
        assert!(args::interleave2_args(W, &[json!(74)]).is_err());
    }

    #[test]
    fn test_interleave2_input_type_invalid() {
        assert!(args::interleave2_args(W, &[json!(78), json!("73")]).is_err());
    }

    #[test]
    fn test_interleave3_input_length_invalid() {
        assert!(args::interleave3_args(W, &[json!(78), json!(73)]).is_err());
    }

    #[test]
    fn test_interleave3_input_type_invalid() {
        assert!(args::interleave3_args(W, &[json!(78), json!(77), json!("73")]).is_err());
    }

    #[test]
    fn test_deinterleave2_input_type_invalid() {
        assert!(args::deinterleave2_arg(W, &json!("73")).is_err());
    }

    #[test]
    fn test_deinterleave3_input_type_invalid() {
        assert!(args::deinterleave3_arg(W, &json!("73")).is_err());
    }

    #[test]
    fn test_interleave_input_length_invalid() {
        assert!(args::interleave_args(W, &[json!(77)]).is_err());
    }

    #[test]
    fn test_facade_json_round_trip() {
        let codec = Zorder::new(CodeWidth::Bits32);
        let code = codec.interleave_json(&[json!(100), json!(30), json!(50)]).unwrap();
        assert_eq!(codec.deinterleave3_json(&json!(code)).unwrap(), (100, 30, 50));
    }
}
