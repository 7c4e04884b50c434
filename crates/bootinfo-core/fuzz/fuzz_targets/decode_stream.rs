#![no_main]

use bootinfo_core::{render_record, validate_record, DecodePhase, SemanticType, StreamDecoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = StreamDecoder::new(data);
    loop {
        match decoder.next_record() {
            Ok(Some(record)) => {
                assert!(validate_record(&record).is_ok());
                let line = render_record(&record);
                assert!(!line.contains('\n') || record.semantic_type == SemanticType::String);
            }
            Ok(None) => {
                assert_eq!(decoder.phase(), DecodePhase::Done);
                break;
            }
            Err(error) => {
                assert_eq!(decoder.phase(), DecodePhase::Failed(error.class()));
                break;
            }
        }
    }
});
