//! Validates the viewer's WGSL blit shader without touching a GPU.

use driftfield::window::BLIT_SHADER;

#[test]
fn blit_shader_is_valid_wgsl() {
    let module = naga::front::wgsl::parse_str(BLIT_SHADER).expect("blit shader should parse");

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    );
    validator.validate(&module).expect("blit shader should validate");
}

#[test]
fn blit_shader_exposes_both_entry_points() {
    let module = naga::front::wgsl::parse_str(BLIT_SHADER).expect("blit shader should parse");
    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
