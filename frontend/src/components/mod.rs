pub mod image_block;
pub mod lookup;
