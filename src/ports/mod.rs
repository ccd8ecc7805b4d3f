mod measurable;
mod renderer;
mod printer;

pub use measurable::{Measurable, SessionSource};
pub use renderer::Renderer;
pub use printer::Printer;
