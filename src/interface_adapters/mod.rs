// Interface adapters: wire DTOs, the frame serializer and scripted input.

pub mod frames;
pub mod input_script;
pub mod protocol;
