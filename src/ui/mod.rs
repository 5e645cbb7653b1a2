pub mod camera;
pub mod panels;
pub mod profile;
pub mod scene;
pub mod viewport;
