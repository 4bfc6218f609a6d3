mod alerts;
mod lifecycle;
mod records;
