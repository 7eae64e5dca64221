// Game-side modules: character sprite resolution and compositing

pub mod characters;
