// Compiled-once regular expression support

mod cache;
