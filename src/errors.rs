error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::json::Error);
    }

    errors {
        BadField(path: String, expected: &'static str) {
            description("malformed field")
            display("{}: expected {}", path, expected)
        }
    }
}
