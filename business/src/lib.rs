pub mod application {
    pub mod catalog {
        pub mod browse;
        pub mod filters;
        pub mod load;
        pub mod navigate;
        pub mod product_card;
        pub mod store;
    }
    pub mod category_rule {
        pub mod get_all;
        pub mod update_selection;
    }
    pub mod product {
        pub mod register;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod filter;
        pub mod pagination;
        pub mod settings;
        pub mod view;
        pub mod use_cases {
            pub mod browse;
            pub mod filters;
            pub mod load;
            pub mod navigate;
            pub mod product_card;
        }
    }
    pub mod category_rule {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod selection;
        pub mod use_cases {
            pub mod get_all;
            pub mod update_selection;
        }
    }
    pub mod pricing {
        pub mod live_window;
        pub mod price_view;
    }
    pub mod product {
        pub mod card;
        pub mod carousel;
        pub mod errors;
        pub mod model;
        pub mod owner;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod register;
        }
    }
}
