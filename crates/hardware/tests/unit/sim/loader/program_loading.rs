//! # Program Loading Tests
//!
//! Verifies listing parsing (comments, blank lines, malformed literals), memory
//! placement, and file input.

use std::io::Write;

use crate::common::builder::ProgramBuilder;
use crate::common::harness::TestContext;
use ls8_core::sim::loader::{self, load, load_bytes, load_file, parse_line, parse_program};
use ls8_core::{Cpu, LoadError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

const PRINT8: &str = "\
# print8.ls8: prints the number 8

10000010 # LDI R0,8
00000000
00001000
01000111 # PRN R0
00000000
00000001 # HLT
";

#[rstest]
#[case("10000010", Some(0x82))]
#[case("  00000001  ", Some(0x01))]
#[case("11111111 # max", Some(0xFF))]
#[case("101", Some(0b101))]
#[case("0", Some(0))]
#[case("", None)]
#[case("   ", None)]
#[case("# only a comment", None)]
#[case("#10000010", None)]
#[case("00000001\r", Some(0x01))]
fn parse_line_accepts(#[case] line: &str, #[case] expected: Option<u8>) {
    assert_eq!(parse_line(1, line).unwrap(), expected);
}

#[rstest]
#[case("10000002")]
#[case("+101")]
#[case("-1")]
#[case("0b101")]
#[case("1010 1010")]
#[case("100000000")]
#[case("LDI")]
fn parse_line_rejects(#[case] line: &str) {
    match parse_line(7, line) {
        Err(LoadError::Parse { line: 7, text }) => assert_eq!(text, line.trim()),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn parse_program_skips_comments_and_blanks() {
    let bytes = parse_program(PRINT8.lines()).unwrap();
    assert_eq!(bytes, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn parse_error_reports_physical_line_number() {
    let listing = ["# header", "", "10000010", "0000000x"];
    assert!(matches!(
        parse_program(listing),
        Err(LoadError::Parse { line: 4, ref text }) if text == "0000000x"
    ));
}

#[test]
fn empty_listing_loads_nothing() {
    let mut cpu = Cpu::default();
    assert_eq!(load(&mut cpu, ["", "# nothing"]).unwrap(), 0);
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn loaded_program_runs() {
    let mut cpu = Cpu::default();
    assert_eq!(load(&mut cpu, PRINT8.lines()).unwrap(), 6);
    assert_eq!(&cpu.ram.as_slice()[..6], &[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    assert_eq!(cpu.run_collect(), Ok(vec![8]));
}

#[test]
fn generated_listing_round_trips_through_loader() {
    let program = ProgramBuilder::new().ldi(0, 8).ldi(1, 9).mul(0, 1).prn(0).hlt();
    let mut ctx = TestContext::new();
    let _ = load(&mut ctx.cpu, program.listing().lines()).unwrap();
    assert_eq!(ctx.run(), Ok(vec![72]));
}

#[test]
fn program_filling_memory_exactly_loads() {
    let mut cpu = Cpu::default();
    let program = vec![0x01; 256];
    assert_eq!(load_bytes(&mut cpu, &program).unwrap(), 256);
}

#[test]
fn oversized_program_leaves_memory_untouched() {
    let mut cpu = Cpu::default();
    let program = vec![0x01; 257];
    assert!(matches!(
        load_bytes(&mut cpu, &program),
        Err(LoadError::Overflow {
            len: 257,
            capacity: 256
        })
    ));
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));

    let listing = vec!["00000001"; 300];
    assert!(matches!(
        load(&mut cpu, listing),
        Err(LoadError::Overflow { len: 300, .. })
    ));
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn parse_error_leaves_memory_untouched() {
    let mut cpu = Cpu::default();
    let err = load(&mut cpu, ["10000010", "00000000", "bogus"]).unwrap_err();
    assert!(matches!(err, LoadError::Parse { line: 3, .. }));
    assert!(cpu.ram.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn load_file_reads_listing() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PRINT8.replace('\n', "\r\n").as_bytes()).unwrap();

    let mut cpu = Cpu::default();
    assert_eq!(load_file(&mut cpu, file.path()).unwrap(), 6);
    assert_eq!(cpu.run_collect(), Ok(vec![8]));
}

#[test]
fn load_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ls8");
    let mut cpu = Cpu::default();
    match loader::load_file(&mut cpu, &path) {
        Err(LoadError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn load_error_messages() {
    let parse = parse_line(12, "2").unwrap_err();
    assert_eq!(parse.to_string(), "line 12: invalid binary literal \"2\"");

    let overflow = load_bytes(&mut Cpu::default(), &[0; 300]).unwrap_err();
    assert_eq!(
        overflow.to_string(),
        "program is 300 bytes but memory holds 256"
    );
}

#[rstest]
#[case("print8.ls8", "8\n")]
#[case("mult.ls8", "72\n")]
#[case("stack.ls8", "2\n1\n")]
fn bundled_programs(#[case] name: &str, #[case] expected: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../programs")
        .join(name);
    let mut ctx = TestContext::new();
    let _ = load_file(&mut ctx.cpu, &path).unwrap();
    assert_eq!(ctx.run_to_string(), expected);
    assert!(ctx.cpu.is_halted());
}
