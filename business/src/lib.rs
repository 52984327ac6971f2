pub mod application {
    pub mod analysis {
        pub mod analyze_barcode;
        pub mod analyze_image;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod analysis {
        pub mod image;
        pub mod model;
        pub mod report;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod analyze_barcode;
            pub mod analyze_image;
        }
    }
}
