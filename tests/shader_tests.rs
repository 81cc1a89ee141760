// Host-side validation of plane.wgsl against the Rust-side uniform and vertex
// layouts.

use naga::valid::{Capabilities, ValidationFlags, Validator};
use plane_core::*;
use std::mem::{offset_of, size_of};

fn parse() -> naga::Module {
    naga::front::wgsl::parse_str(PLANE_WGSL).expect("plane.wgsl should parse")
}

fn struct_members(module: &naga::Module, name: &str) -> (Vec<naga::StructMember>, u32) {
    module
        .types
        .iter()
        .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
            (Some(n), naga::TypeInner::Struct { members, span }) if n == name => {
                Some((members.clone(), *span))
            }
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct {name} missing"))
}

#[test]
fn shader_validates() {
    let module = parse();
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .expect("plane.wgsl should validate");
}

#[test]
fn entry_points_exist() {
    let module = parse();
    let stage_of = |name: &str| {
        module
            .entry_points
            .iter()
            .find(|ep| ep.name == name)
            .map(|ep| ep.stage)
    };
    assert_eq!(stage_of("vs_main"), Some(naga::ShaderStage::Vertex));
    assert_eq!(stage_of("fs_main"), Some(naga::ShaderStage::Fragment));
}

#[test]
fn uniforms_struct_matches_uniform_block() {
    let module = parse();
    let (members, span) = struct_members(&module, "Uniforms");
    assert_eq!(span as usize, size_of::<UniformBlock>());

    let expected = [
        ("model", offset_of!(UniformBlock, model)),
        ("view_proj", offset_of!(UniformBlock, view_proj)),
        ("base_color", offset_of!(UniformBlock, base_color)),
        ("frequency", offset_of!(UniformBlock, frequency)),
        ("time", offset_of!(UniformBlock, time)),
        ("amplitude", offset_of!(UniformBlock, amplitude)),
    ];
    assert_eq!(members.len(), expected.len());
    for (member, (name, offset)) in members.iter().zip(expected) {
        assert_eq!(member.name.as_deref(), Some(name));
        assert_eq!(member.offset as usize, offset, "offset of {name}");
    }
}

#[test]
fn uniforms_bound_at_group0_binding0() {
    let module = parse();
    let found = module.global_variables.iter().any(|(_, var)| {
        var.space == naga::AddressSpace::Uniform
            && var.binding
                == Some(naga::ResourceBinding {
                    group: 0,
                    binding: 0,
                })
    });
    assert!(found);
}

#[test]
fn vertex_inputs_use_renderer_locations() {
    let module = parse();
    let (members, _) = struct_members(&module, "VsIn");
    let names: Vec<_> = members.iter().map(|m| m.name.clone().unwrap_or_default()).collect();
    assert_eq!(names, ["position", "normal", "uv", "spike"]);
    for (i, member) in members.iter().enumerate() {
        assert!(
            matches!(member.binding, Some(naga::Binding::Location { location, .. }) if location == i as u32),
            "{:?} should sit at location {i}",
            member.name
        );
    }
}
