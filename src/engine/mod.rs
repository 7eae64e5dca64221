// Engine modules: asset handles and renderer-facing output

pub mod assets;
pub mod renderer;
