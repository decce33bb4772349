pub mod receipt {
    pub mod repository;
}
