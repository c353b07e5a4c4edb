use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, ShaderType,
            SpecializedMeshPipelineError,
        },
    },
};

/// Uniform block shared by every effect shader.
#[derive(Debug, Clone, Copy, Default, ShaderType)]
pub struct FxUniform {
    pub time: f32,
    pub active: u32,
    pub effect_time: f32,
    pub _padding: u32,
}

fn disable_culling(descriptor: &mut RenderPipelineDescriptor) {
    descriptor.primitive.cull_mode = None;
}

/// Displaced ocean surface; the whole sheet winds around its centre
/// while the whirlpool effect is on.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct WaterMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for WaterMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/water.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/water.wgsl".into()
    }
}

/// Rolling grass hills that whiten while snow is falling.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct HillsMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for HillsMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/hills.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/hills.wgsl".into()
    }
}

/// The giant torus the acid world lives inside. Rendered from within,
/// so culling is off.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct TubeMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for TubeMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/tube.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/tube.wgsl".into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        disable_culling(descriptor);
        Ok(())
    }
}

/// Gradient sky seen from inside the dome.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct SkyMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for SkyMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/sky.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/sky.wgsl".into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        disable_culling(descriptor);
        Ok(())
    }
}

/// The visible sun disc.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct SunMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for SunMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/sun.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/sun.wgsl".into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        disable_culling(descriptor);
        Ok(())
    }
}

/// Falling snow triangles; the shader does the falling.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone, Default)]
pub struct SnowMaterial {
    #[uniform(0)]
    pub fx: FxUniform,
}

impl Material for SnowMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/snow.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/snow.wgsl".into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        _layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        disable_culling(descriptor);
        Ok(())
    }
}
