mod data;
mod join;
mod mac_commands;
mod raw;
