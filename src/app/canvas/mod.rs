mod hover;
mod view;
