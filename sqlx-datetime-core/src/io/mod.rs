mod buf;
mod buf_mut;

pub use buf::BufExt;
pub use buf_mut::BufMutExt;
