use std::fmt::Display;

use fmtprims_message::{ErrorCode, Message, MessageError, TemplateCatalog};

#[test]
fn every_code_renders_with_its_arity_and_fails_otherwise() {
    let catalog = TemplateCatalog::builtin();
    let pool: [&dyn Display; 3] = [&"alpha", &"beta", &7];

    for code in ErrorCode::ALL {
        let arity = code.arity();
        let message = catalog.render(*code, &pool[..arity]).unwrap();
        assert_eq!(message.code(), *code);
        assert!(!message.description().contains("{}"), "{code}");
        assert!(!message.description().contains("%!"), "{code}");

        if arity < pool.len() {
            assert_eq!(
                catalog.render(*code, &pool[..arity + 1]),
                Err(MessageError::ArityMismatch {
                    code: *code,
                    expected: arity,
                    got: arity + 1,
                })
            );
        }
    }
}

#[test]
fn message_render_matches_catalog() {
    let direct = Message::render(ErrorCode::StringLengthMustBeLowerOrEqual, &[&64]).unwrap();
    let via_catalog = TemplateCatalog::builtin()
        .render(ErrorCode::StringLengthMustBeLowerOrEqual, &[&64])
        .unwrap();
    assert_eq!(direct, via_catalog);
    assert_eq!(direct.to_string(), "string length must be lower or equal to 64");
}
