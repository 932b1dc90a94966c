//! Tests for the skeleton template driven by an opcode list file.

use mterp_gen::opcode_list::load_opcode_list;
use mterp_gen::{AlignStyle, GenConfig, GenError, Generator, SkeletonTemplate};
use std::fs;

#[test]
fn test_skeleton_from_opcode_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempfile::tempdir().unwrap();
    let list = dir.path().join("opcodes.txt");
    let output = dir.path().join("out").join("mterp_x86_64.S");
    fs::create_dir(dir.path().join("out")).unwrap();
    fs::write(&list, "0x00 nop\n0x01 move\n0x0e return_void\n").unwrap();

    let opcodes = load_opcode_list(&list).unwrap();
    let config = GenConfig::new()
        .with_handler_size("128", "7")
        .with_align_style(AlignStyle::P2align)
        .with_label_prefix("op_");
    let generator = Generator::new(SkeletonTemplate::new("nterp_", opcodes), config);

    let stats = generator.generate(&output).unwrap();
    let text = fs::read_to_string(&output).unwrap();

    assert!(text.starts_with("/* DO NOT EDIT: This file was generated by mterp-gen. */\n"));
    assert!(text.contains("op_return_void: /* 0x0e */\n"));
    assert_eq!(text.matches("    .p2align 7\n").count(), 5);
    assert!(!text.contains(".balign"));
    assert_eq!(stats.opcodes_emitted, 3);
    assert_eq!(stats.slow_paths_registered, 4);
}

#[test]
fn test_missing_opcode_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    match load_opcode_list(&missing) {
        Err(GenError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other),
    }
}
