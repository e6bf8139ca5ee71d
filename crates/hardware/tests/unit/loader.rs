//! Program Loader Tests.
//!
//! Text parsing (comments, blank lines, malformed tokens) and file-level
//! behavior against real temporary files.

use std::io::Write;

use pretty_assertions::assert_eq;

use ls8_core::Fault;
use ls8_core::sim::loader::{parse_program, read_program};

use crate::common::harness::TestContext;

#[test]
fn parses_cells_one_per_line() {
    let image = parse_program("10000010\n00000000\n00001000\n").expect("valid program");
    assert_eq!(image, vec![0b1000_0010, 0, 0b0000_1000]);
}

#[test]
fn strips_comments_and_blank_lines() {
    let text = "\
# A comment-only line
10000010 # LDI R0,8
00000000

00001000
# trailing comment
";
    let image = parse_program(text).expect("valid program");
    assert_eq!(image, vec![0b1000_0010, 0, 0b0000_1000]);
}

#[test]
fn comment_only_program_is_empty() {
    assert_eq!(parse_program("# nothing here\n\n"), Ok(vec![]));
}

#[test]
fn malformed_token_names_the_line() {
    let err = parse_program("10000010\nnot-a-number\n").expect_err("must fail");
    match err {
        Fault::ProgramLoad(reason) => {
            assert!(reason.contains("line 2"), "got: {reason}");
            assert!(reason.contains("not-a-number"), "got: {reason}");
        }
        other => panic!("expected ProgramLoad, got {other:?}"),
    }
}

#[test]
fn non_binary_digit_is_malformed() {
    assert!(parse_program("10000020\n").is_err());
}

#[test]
fn literal_wider_than_a_cell_is_malformed() {
    assert!(parse_program("100000001\n").is_err());
}

#[test]
fn read_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "10000010 # LDI R0,8\n00000000\n00001000\n01000111\n00000000\n00000001\n")
        .expect("write");

    let image = read_program(file.path()).expect("readable program");
    assert_eq!(image.len(), 6);
    assert_eq!(image[0], 0b1000_0010);
}

#[test]
fn unreadable_path_fails_the_load() {
    let err = read_program(std::path::Path::new("/no/such/program.ls8")).expect_err("must fail");
    assert!(matches!(err, Fault::ProgramLoad(_)));
}

#[test]
fn image_larger_than_memory_is_rejected() {
    let ctx = &mut TestContext::new();
    let image = vec![0u8; 257];
    let err = ctx.cpu.load(&image).expect_err("must fail");
    assert!(matches!(err, Fault::ProgramLoad(_)));
}

#[test]
fn image_filling_memory_exactly_loads() {
    let ctx = &mut TestContext::new();
    let image = vec![0u8; 256];
    assert_eq!(ctx.cpu.load(&image), Ok(()));
}

#[test]
fn loading_does_not_reset_machine_state() {
    let mut ctx = TestContext::new();
    ctx.cpu.pc = 3;
    ctx.cpu.load(&[0b0000_0001]).expect("load");
    assert_eq!(ctx.cpu.pc, 3);
}
