#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1,2017-01-02 08:05:00,2017-01-02 08:15:00,600,Clark St,Lake St,Subscriber,Male,1985.0
2,2017-01-02 17:10:00,2017-01-02 17:25:00,900,Clark St,Lake St,Subscriber,Female,1990.0
3,2017-01-03 17:20:00,2017-01-03 17:25:00,300,Canal St,Lake St,Customer,,
4,2017-03-06 17:00:00,2017-03-06 17:20:00,1200,Clark St,Canal St,Subscriber,Male,1990.0
5,2017-03-07 09:00:00,2017-03-07 09:01:00,60,Wells St,Clark St,Subscriber,Male,1972.0
6,2017-03-08 12:30:00,2017-03-08 12:31:01,61,Wells St,Clark St,Customer,Female,2001.0
7,2017-03-13 00:15:00,2017-03-13 01:16:01,3661,Clark St,Lake St,Subscriber,Male,1990.0
8,2017-06-05 17:45:00,2017-06-05 17:53:20,500,Lake St,Clark St,Subscriber,Female,1985.0
9,2017-06-06 08:00:00,2017-06-06 08:06:40,400,Lake St,Canal St,Dependent,,
10,2017-06-07 13:00:00,2017-06-07 13:11:40,700,Canal St,Clark St,Subscriber,Male,1980.0
11,2017-06-11 23:59:00,2017-06-12 00:00:40,100,Clark St,Wells St,Customer,Female,1995.0
12,2017-05-14 12:00:00,2017-05-14 12:01:58,118,Wells St,Lake St,Subscriber,Male,1990.0
";

pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
1330037,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Customer
";

pub fn bikeshare(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("bikeshare");
    cmd.env("HOME", home).env_remove("BIKESHARE_LOG");
    cmd
}

fn temp_path(name: &str, suffix: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}", name, suffix));
    path
}

/// Fresh, empty directory used as $HOME so no real config is read
pub fn setup_home(name: &str) -> String {
    let path = temp_path(name, "bikeshare_home");
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create home");
    path.to_string_lossy().to_string()
}

/// Data directory holding the three city fixtures
pub fn setup_data_dir(name: &str) -> String {
    let path = temp_path(name, "bikeshare_data");
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");

    fs::write(path.join("chicago.csv"), CHICAGO_CSV).expect("write chicago");
    fs::write(path.join("new_york_city.csv"), NEW_YORK_CITY_CSV).expect("write nyc");
    fs::write(path.join("washington.csv"), WASHINGTON_CSV).expect("write washington");

    path.to_string_lossy().to_string()
}
