mod input;

pub use input::InputController;
