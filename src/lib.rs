pub mod config;

pub mod shared {
    pub mod core {
        pub mod access;
        pub mod approval;
        pub mod clock;
        pub mod decider;
    }
    pub mod application {
        pub mod command_handler;
        pub mod projector;
    }
    pub mod infrastructure {
        pub mod csv_export;
        pub mod event_store;
        pub mod read_model;
    }
}

pub mod modules {
    pub mod identity {
        pub mod core {
            pub mod password;
            pub mod ports;
            pub mod session;
            pub mod user;
        }
        pub mod use_cases {
            pub mod sign_in {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_users {
                pub mod inbound {
                    pub mod http;
                }
                pub mod seed_admin;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod sessions_in_memory;
                pub mod users_in_memory;
            }
        }
    }

    pub mod time_tracking {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod decider;
            pub mod duration;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod clock {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_time_entries {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_time_entries {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_time_entries {
                pub mod graphql;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod queries_in_memory;
            }
        }
    }

    pub mod orders {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod decider;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod dispatch_orders {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod work_orders {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_orders {
                pub mod graphql;
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod queries_in_memory;
            }
        }
    }

    pub mod customers {
        pub mod core {
            pub mod customer;
        }
        pub mod use_cases {
            pub mod manage_customers {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod customers_in_memory;
            }
        }
    }

    pub mod absences {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod decider;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod request_absence {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_absences {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_absences {
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod queries_in_memory;
            }
        }
    }

    pub mod daily_reports {
        pub mod core {
            pub mod commands;
            pub mod decide;
            pub mod decider;
            pub mod events;
            pub mod evolve;
            pub mod projections;
            pub mod state;
        }
        pub mod use_cases {
            pub mod submit_daily_reports {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_daily_reports {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_daily_reports {
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod queries_in_memory;
            }
        }
    }

    pub mod payroll {
        pub mod core {
            pub mod monthly_hours;
            pub mod premium_pay;
        }
        pub mod use_cases {
            pub mod premium_pay {
                pub mod inbound {
                    pub mod http;
                }
                pub mod report;
            }
        }
    }

    pub mod exports {
        pub mod core {
            pub mod records;
        }
        pub mod use_cases {
            pub mod download_exports {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
