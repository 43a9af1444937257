//! End-to-end tests against a running Cartel backend on 127.0.0.1:8080.
//! Built only with `--features system_tests`.
