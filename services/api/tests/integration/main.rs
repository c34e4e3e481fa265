mod helpers;

mod booking_test;
mod cascade_test;
mod stats_test;
mod sync_test;
