pub mod render;
pub mod state;
pub mod toast;

pub use render::render_form;
pub use state::FormState;
