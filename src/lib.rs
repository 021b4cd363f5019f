pub mod shared {
    pub mod core {
        pub mod clock;
        pub mod tenant;
    }
    pub mod auth {
        pub mod claims;
        pub mod jwt;
        pub mod middleware;
    }
    pub mod infrastructure {
        pub mod remote_api;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod errors;
            pub mod ports;
            pub mod time_entry;
            pub mod timer_engine;
            pub mod views;
        }
        pub mod use_cases {
            pub mod start_timer {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod stop_timer {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_current_timer {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod sync_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod time_entry_store_in_memory;
                pub mod timesheet_gateway_http;
            }
        }
    }
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_source_http;
                pub mod employee_source_static;
            }
        }
    }
}

pub mod shell;
