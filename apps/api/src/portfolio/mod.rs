// Portfolio content API: the section data behind the site, served as JSON.

pub mod handlers;
