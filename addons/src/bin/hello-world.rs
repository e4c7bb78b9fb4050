addon_functions::invoke!(addons::hello_world::handle, addons::configure_logging);
