use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message("`Thing` implements `Stuffable#stuff` with an incompatible signature")
        .with_label("Stuffable#stuff", "expected (req, aaa:, bbb:)")
        .with_secondary_label("Thing#stuff", "found (req)")
        .with_note("missing keyword `aaa`")
        .with_suggestion("accept `aaa:` in `Thing#stuff`")
}

#[test]
fn test_terminal_emitter_no_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("error[E1004]: "));
    assert!(text.contains("  --> Stuffable#stuff: expected (req, aaa:, bbb:)\n"));
    assert!(text.contains("      Thing#stuff: found (req)\n"));
    assert!(text.contains("  = note: missing keyword `aaa`\n"));
    assert!(text.contains("  = help: accept `aaa:` in `Thing#stuff`\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Always, false);

    emitter.emit(&sample_diagnostic());
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("\x1b["));
    assert!(text.contains("E1004"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_emit_all_and_summary() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);

    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::error(ErrorCode::E1002).with_message("error 2"),
    ];

    emitter.emit_all(&diagnostics);
    emitter.emit_summary(2);
    emitter.flush();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("error 1"));
    assert!(text.contains("error 2"));
    assert!(text.ends_with("\nerror: 2 subjects failed to conform\n"));
}

#[test]
fn test_summary_counts_failed_subjects() {
    let mut output = Vec::new();
    let mut emitter = TerminalEmitter::with_color_mode(&mut output, ColorMode::Never, false);
    emitter.emit_summary(1);
    emitter.emit_summary(0);
    emitter.emit_summary(3);

    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "error: 1 subject failed to conform\nerror: 3 subjects failed to conform\n"
    );
}
