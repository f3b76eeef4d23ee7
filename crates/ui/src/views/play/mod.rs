mod components;
mod driver;
mod end;
mod scripts;
mod view;

pub use view::PlayView;
