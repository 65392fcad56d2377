pub mod box_blur;
pub mod glass_backdrop;
pub mod line_pass;
pub mod liquid_glass;
pub mod multi_pass_gaussian;
pub mod pixel_blur_engine;
pub mod stack_blur;
