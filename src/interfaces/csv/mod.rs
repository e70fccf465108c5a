pub mod booking_writer;
pub mod menu_item_reader;
