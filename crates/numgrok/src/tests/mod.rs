mod arbitrary;

mod property_kinds;
