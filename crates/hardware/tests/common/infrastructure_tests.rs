//! Tests for the builder and harness.

use super::builder::ProgramBuilder;
use super::harness::TestContext;
use ls8_core::sim::loader;
use pretty_assertions::assert_eq;

#[test]
fn builder_encodes_instructions() {
    let bytes = ProgramBuilder::new().ldi(0, 8).prn(0).hlt().build();
    assert_eq!(bytes, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
}

#[test]
fn builder_listing_round_trips_through_loader() {
    let builder = ProgramBuilder::new().ldi(2, 200).push(2).pop(3).mul(2, 3).hlt();
    let listing = builder.listing();
    let parsed = loader::parse_program(listing.lines()).unwrap();
    assert_eq!(parsed, builder.build());
}

#[test]
fn listing_comments_carry_disassembly() {
    let listing = ProgramBuilder::new().ldi(0, 8).hlt().listing();
    assert!(listing.contains("10000010 # LDI R0, 8"));
    assert!(listing.contains("00000001 # HLT"));
}

#[test]
fn harness_loads_and_runs() {
    let mut ctx = TestContext::new().load_program(&ProgramBuilder::new().ldi(5, 9).hlt().build());
    assert_eq!(ctx.run(), Ok(vec![]));
    assert_eq!(ctx.reg(5), 9);
    assert!(ctx.cpu.is_halted());
}
