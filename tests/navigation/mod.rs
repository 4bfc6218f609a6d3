mod login;
mod tabs;
