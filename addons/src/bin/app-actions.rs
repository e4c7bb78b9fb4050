addon_functions::invoke!(addons::app_actions::handle, addons::configure_logging);
