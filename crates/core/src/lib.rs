//! Software pixel blurs for packed ARGB rasters: box, stack, multi-pass
//! Gaussian and a liquid glass effect, plus the image pipeline around them.

pub mod blurring {
    pub mod domain {
        pub mod blur_error;
        pub mod blur_quality;
        pub mod blur_request;
        pub mod raster_blurrer;
    }
    pub mod infrastructure;
}

pub mod image_io {
    pub mod domain {
        pub mod image_reader;
        pub mod image_writer;
    }
    pub mod infrastructure {
        pub mod image_file_reader;
        pub mod image_file_writer;
    }
}

pub mod pipeline {
    pub mod background_blur_worker;
    pub mod blur_image_use_case;
}

pub mod shared {
    pub mod constants;
    pub mod pixel;
    pub mod raster;
    pub mod settings;
}
