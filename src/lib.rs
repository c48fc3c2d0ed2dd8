pub mod shared {
    pub mod infrastructure {
        pub mod registration_journal;
    }
}

pub mod modules {
    pub mod registration {
        pub mod core {
            pub mod catalog;
            pub mod course;
            pub mod events;
            pub mod roster;
            pub mod student;
        }
        pub mod seed;
        pub mod service;
        pub mod use_cases {
            pub mod register_course {
                pub mod outcome;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod drop_course {
                pub mod outcome;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_registrations {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_courses {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_students {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_registration_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
