pub mod application {
    pub mod catalog {
        pub mod get_categories;
        pub mod get_shared_items;
        pub mod search_shared_items;
    }
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod toggle_check;
    }
    pub mod list {
        pub mod create;
        pub mod get_all;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_categories;
            pub mod get_shared_items;
            pub mod search_shared_items;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod toggle_check;
        }
    }
    pub mod list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
