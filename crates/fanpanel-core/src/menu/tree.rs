use super::{Guard, MenuAction, MenuNode, MenuPage};
use crate::{
    settings::{ChoiceField, NumericField},
    telemetry::{AlarmKind, ReadingSource},
};

const fn temperature_field(label: &'static str, field: NumericField) -> MenuNode {
    MenuNode::Field {
        label,
        field,
        units: "C",
        min: -40,
        max: 125,
        step: 1,
    }
}

const fn alarm(label: &'static str, kind: AlarmKind) -> MenuNode {
    MenuNode::Reading {
        label,
        source: ReadingSource::Alarm(kind),
        units: "",
    }
}

const fn fan_page(label: &'static str, index: u8) -> MenuPage {
    MenuPage {
        label,
        guard: Guard::Open,
        children: if index == 0 {
            &[
                MenuNode::Choice {
                    label: "Fan1Model",
                    field: ChoiceField::Fan1Model,
                },
                MenuNode::Field {
                    label: "NomFan1Current",
                    field: NumericField::Fan1Nominal,
                    units: "mA",
                    min: 0,
                    max: 10_000,
                    step: 1,
                },
                MenuNode::Back,
            ]
        } else {
            &[
                MenuNode::Choice {
                    label: "Fan2Model",
                    field: ChoiceField::Fan2Model,
                },
                MenuNode::Field {
                    label: "NomFan2Current",
                    field: NumericField::Fan2Nominal,
                    units: "mA",
                    min: 0,
                    max: 10_000,
                    step: 1,
                },
                MenuNode::Back,
            ]
        },
    }
}

/// Top-level menu. The root children are the carousel tiles.
pub static MAIN_MENU: MenuPage = MenuPage {
    label: "Main",
    guard: Guard::Open,
    children: &[
        MenuNode::Submenu(MenuPage {
            label: "Status",
            guard: Guard::Open,
            children: &[
                MenuNode::Reading {
                    label: "Temperature",
                    source: ReadingSource::Temperature,
                    units: "C",
                },
                MenuNode::Reading {
                    label: "InputVoltage",
                    source: ReadingSource::SupplyVoltage,
                    units: "V",
                },
                MenuNode::Reading {
                    label: "Fan1Current",
                    source: ReadingSource::FanCurrent(0),
                    units: "mA",
                },
                MenuNode::Reading {
                    label: "Fan2Current",
                    source: ReadingSource::FanCurrent(1),
                    units: "mA",
                },
                MenuNode::Reading {
                    label: "Fan1Power",
                    source: ReadingSource::FanPower(0),
                    units: "W",
                },
                MenuNode::Reading {
                    label: "Fan2Power",
                    source: ReadingSource::FanPower(1),
                    units: "W",
                },
                MenuNode::Reading {
                    label: "Fan1Runtime",
                    source: ReadingSource::FanRuntime(0),
                    units: "min",
                },
                MenuNode::Reading {
                    label: "Fan2Runtime",
                    source: ReadingSource::FanRuntime(1),
                    units: "min",
                },
                MenuNode::Reading {
                    label: "LightOK",
                    source: ReadingSource::LightCondition,
                    units: "",
                },
                MenuNode::Back,
            ],
        }),
        MenuNode::Submenu(MenuPage {
            label: "Alarms",
            guard: Guard::Open,
            children: &[
                alarm("DoorAlarm", AlarmKind::Door),
                alarm("WaterAlarm", AlarmKind::Water),
                alarm("SmokeAlarm", AlarmKind::Smoke),
                alarm("TempAlarm", AlarmKind::Temperature),
                alarm("FanFaultAlarm", AlarmKind::FanFault),
                alarm("AviationAlarm", AlarmKind::Aviation),
                MenuNode::Back,
            ],
        }),
        MenuNode::Submenu(MenuPage {
            label: "Settings",
            guard: Guard::Password,
            children: &[
                MenuNode::Submenu(MenuPage {
                    label: "TemperatureSettings",
                    guard: Guard::Open,
                    children: &[
                        temperature_field("TempThresholdL", NumericField::TempLow),
                        temperature_field("TempThresholdH", NumericField::TempHigh),
                        temperature_field("TempHiThreshold", NumericField::TempAlarm),
                        MenuNode::Back,
                    ],
                }),
                MenuNode::Submenu(MenuPage {
                    label: "SystemSettings",
                    guard: Guard::Open,
                    children: &[
                        MenuNode::Field {
                            label: "VoltLThreshold",
                            field: NumericField::VoltLow,
                            units: "V",
                            min: 0,
                            max: 300,
                            step: 1,
                        },
                        MenuNode::Field {
                            label: "VoltHThreshold",
                            field: NumericField::VoltHigh,
                            units: "V",
                            min: 0,
                            max: 300,
                            step: 1,
                        },
                        MenuNode::Back,
                    ],
                }),
                MenuNode::Submenu(MenuPage {
                    label: "FanSettings",
                    guard: Guard::Open,
                    children: &[
                        MenuNode::Field {
                            label: "TogglePeriod",
                            field: NumericField::TogglePeriod,
                            units: "min",
                            min: 0,
                            max: 100,
                            step: 1,
                        },
                        MenuNode::Choice {
                            label: "FanCurrentUnit",
                            field: ChoiceField::CurrentUnit,
                        },
                        MenuNode::Choice {
                            label: "FanProfile",
                            field: ChoiceField::FanProfile,
                        },
                        MenuNode::Submenu(fan_page("Fan 1 Settings", 0)),
                        MenuNode::Submenu(fan_page("Fan 2 Settings", 1)),
                        MenuNode::Back,
                    ],
                }),
                MenuNode::Submenu(MenuPage {
                    label: "ModbusSettings",
                    guard: Guard::Open,
                    children: &[
                        MenuNode::Choice {
                            label: "Baudrate",
                            field: ChoiceField::BaudRate,
                        },
                        MenuNode::Field {
                            label: "SlaveID",
                            field: NumericField::SlaveId,
                            units: "",
                            min: 1,
                            max: 247,
                            step: 1,
                        },
                        MenuNode::Back,
                    ],
                }),
                MenuNode::Submenu(MenuPage {
                    label: "AviationSettings",
                    guard: Guard::Open,
                    children: &[
                        MenuNode::Field {
                            label: "AviLDRThreshold",
                            field: NumericField::LdrThreshold,
                            units: "LUX",
                            min: 1,
                            max: 247,
                            step: 1,
                        },
                        MenuNode::Back,
                    ],
                }),
                MenuNode::Action {
                    label: "Run Factory Reset",
                    action: MenuAction::FactoryReset,
                },
                MenuNode::Back,
            ],
        }),
        MenuNode::Submenu(MenuPage {
            label: "About",
            guard: Guard::Open,
            children: &[
                MenuNode::Info {
                    label: "SWVersion: 1.14",
                },
                MenuNode::Info {
                    label: "SWDate: 2025-04-01",
                },
                MenuNode::Info {
                    label: "Installed: 2025-04-01",
                },
                MenuNode::Info {
                    label: "Serial: SARBS_ODCC_1001",
                },
                MenuNode::Back,
            ],
        }),
    ],
};
