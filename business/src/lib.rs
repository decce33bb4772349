pub mod application {
    pub mod receipt {
        pub mod get_points;
        pub mod process;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod scoring;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_points;
            pub mod process;
        }
    }
}
