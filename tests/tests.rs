mod navigation;
mod scope;
mod store;
