use std::fs;
use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_sic");

#[test]
fn listing_on_stdout() {
    let output = Command::new(BIN)
        .args(["../sample/inst.data", "../sample/copy.asm"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let fixture = fs::read_to_string("../sample/copy.lst").unwrap();
    assert_eq!(String::from_utf8_lossy(&output.stdout), fixture);
}

#[test]
fn missing_arguments() {
    let output = Command::new(BIN)
        .arg("../sample/inst.data")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_instruction_table() {
    let output = Command::new(BIN)
        .args(["../sample/nothing.data", "../sample/copy.asm"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nothing.data"));
}

#[test]
fn missing_source() {
    let output = Command::new(BIN)
        .args(["../sample/inst.data", "../sample/nothing.asm"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
}

#[test]
fn object_program_file() {
    let path = std::env::temp_dir().join(format!("sic-cli-test-{}.obj", std::process::id()));
    let output = Command::new(BIN)
        .args(["../sample/inst.data", "../sample/copy.asm", "--object"])
        .arg(&path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let result = fs::read_to_string(&path).unwrap();
    let fixture = fs::read_to_string("../sample/copy.obj").unwrap();
    assert_eq!(result, fixture);

    fs::remove_file(&path).unwrap();
}

#[test]
fn source_bytes_pass_through() {
    let path = std::env::temp_dir().join(format!("sic-cli-test-{}.asm", std::process::id()));
    fs::write(&path, b"A     BYTE  C'\xE9'\nB     WORD  1\n").unwrap();
    let output = Command::new(BIN)
        .arg("../sample/inst.data")
        .arg(&path)
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        output.stdout,
        b"0000  E9      A     BYTE  C'\xE9'\n\
          0001  000001  B     WORD  1\n"
            .to_vec()
    );
}

#[test]
fn debug_log_lists_symbols() {
    let output = Command::new(BIN)
        .args(["../sample/inst.data", "../sample/copy.asm", "-l", "DEBUG"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RDREC  1079"));
    assert!(stderr.contains("WRREC  10A1"));
}
