pub mod details_writer;
