// Interface adapters: wire DTOs for renderers and scripted input.

pub mod input_script;
pub mod protocol;
