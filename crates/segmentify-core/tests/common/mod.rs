pub mod extract_fixture;
