mod panel_properties;
